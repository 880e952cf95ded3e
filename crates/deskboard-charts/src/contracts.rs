use deskboard_core::charts::ChartBaseOptions;
use deskboard_core::charts::ChartOptionsPatch;
use deskboard_core::charts::ChartSeries;
use deskboard_core::charts::ChartSpec;
use deskboard_core::charts::ChartSpecError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartBackendError {
    #[error(transparent)]
    Spec(#[from] ChartSpecError),
    #[error("backend cannot mount chart at {mount:?}: {reason}")]
    Mount { mount: String, reason: String },
}

/// A mounted chart. `spec` is the construction-time description; the data
/// actually on screen flows through `series` and is replaced wholesale by
/// `update_series`. Option patches never touch series data.
pub trait ChartHandle {
    fn render(&mut self);
    fn update_series(&mut self, series: Vec<ChartSeries>);
    fn update_options(&mut self, patch: ChartOptionsPatch);
    fn series(&self) -> &[ChartSeries];
    fn options(&self) -> &ChartBaseOptions;
    fn spec(&self) -> &ChartSpec;
}

pub trait ChartBackend {
    fn construct(
        &self,
        mount_id: &str,
        spec: ChartSpec,
        options: ChartBaseOptions,
    ) -> Result<Box<dyn ChartHandle>, ChartBackendError>;
}
