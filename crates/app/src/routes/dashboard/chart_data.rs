use shared_types::{ASSET_VALUE_SERIES, ESG_SCORES, SUPPLY_CHAIN};
use shared_ui::{ChartDatum, DonutSlice};

/// Monthly asset value in $M.
pub fn asset_value_data() -> Vec<ChartDatum> {
    ASSET_VALUE_SERIES
        .iter()
        .map(|point| ChartDatum::new(point.month, point.value))
        .collect()
}

pub fn esg_score_data() -> Vec<ChartDatum> {
    ESG_SCORES
        .iter()
        .map(|score| ChartDatum::new(score.category, score.score))
        .collect()
}

pub fn supply_chain_slices() -> Vec<DonutSlice> {
    SUPPLY_CHAIN
        .iter()
        .map(|slice| DonutSlice {
            label: slice.name.to_string(),
            value: slice.value,
            color: slice.color.to_string(),
        })
        .collect()
}
