use serde::Serialize;

use crate::errors::AppError;

/// Closed set of model identifiers accepted by the `/model/{model_name}` route.
/// Anything outside the set is rejected before the handler body runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelName {
    Alexnet,
    Resnet,
    Lenet,
}

impl ModelName {
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "alexnet" => Ok(Self::Alexnet),
            "resnet" => Ok(Self::Resnet),
            "lenet" => Ok(Self::Lenet),
            _ => Err(AppError::invalid_field(
                "path.model_name",
                "must be one of: alexnet, resnet, lenet",
            )),
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Alexnet => "Deep Learning FTW!",
            Self::Lenet => "LeCNN all the images",
            Self::Resnet => "Have some residuals",
        }
    }
}
