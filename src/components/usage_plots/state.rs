use crate::metrics::process::{HoverLabel, MetricType, Series};

#[derive(Default)]
pub struct UsagePlots {
    pub series: Series,
    pub annotation: Option<HoverLabel>,
}

impl UsagePlots {
    pub fn annotation_for(&self, metric: MetricType) -> Option<&HoverLabel> {
        self.annotation
            .as_ref()
            .filter(|label| label.metric == metric)
    }
}
