use crate::entities::DistributionType;

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) enum DistributionTypeModel {
    Percentage,
    FixedAmount,
}

impl Into<DistributionType> for DistributionTypeModel {
    fn into(self) -> DistributionType {
        match self {
            DistributionTypeModel::Percentage => DistributionType::Percentage,
            DistributionTypeModel::FixedAmount => DistributionType::FixedAmount,
        }
    }
}
