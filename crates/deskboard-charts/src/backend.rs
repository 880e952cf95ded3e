use deskboard_core::charts::ChartBaseOptions;
use deskboard_core::charts::ChartOptionsPatch;
use deskboard_core::charts::ChartSeries;
use deskboard_core::charts::ChartSpec;

use crate::contracts::ChartBackend;
use crate::contracts::ChartBackendError;
use crate::contracts::ChartHandle;

/// In-process backend. Handles hold their spec, presentation options and
/// live series in memory, which is all a terminal frontend needs to draw.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoryChartBackend;

pub struct MemoryChartHandle {
    mount_id: String,
    spec: ChartSpec,
    options: ChartBaseOptions,
    series: Vec<ChartSeries>,
    rendered: bool,
}

impl MemoryChartHandle {
    pub fn mount_id(&self) -> &str {
        self.mount_id.as_str()
    }

    pub fn rendered(&self) -> bool {
        self.rendered
    }
}

/// Slice charts carry one anonymous series so every chart kind reads back
/// through the same channel.
fn initial_series(spec: &ChartSpec) -> Vec<ChartSeries> {
    match spec {
        ChartSpec::Area { series, .. } | ChartSpec::Bar { series, .. } => series.clone(),
        ChartSpec::Donut { values, .. }
        | ChartSpec::Pie { values, .. }
        | ChartSpec::RadialBar { values, .. } => vec![ChartSeries {
            name: None,
            data: values.clone(),
        }],
    }
}

impl ChartBackend for MemoryChartBackend {
    fn construct(
        &self,
        mount_id: &str,
        spec: ChartSpec,
        options: ChartBaseOptions,
    ) -> Result<Box<dyn ChartHandle>, ChartBackendError> {
        let series = initial_series(&spec);
        Ok(Box::new(MemoryChartHandle {
            mount_id: mount_id.to_string(),
            spec,
            options,
            series,
            rendered: false,
        }))
    }
}

impl ChartHandle for MemoryChartHandle {
    fn render(&mut self) {
        self.rendered = true;
    }

    fn update_series(&mut self, series: Vec<ChartSeries>) {
        self.series = series;
    }

    fn update_options(&mut self, patch: ChartOptionsPatch) {
        if let Some(mode) = patch.theme_mode {
            self.options.theme_mode = mode;
        }
    }

    fn series(&self) -> &[ChartSeries] {
        &self.series
    }

    fn options(&self) -> &ChartBaseOptions {
        &self.options
    }

    fn spec(&self) -> &ChartSpec {
        &self.spec
    }
}

#[cfg(test)]
mod tests {
    use deskboard_core::state::ThemePref;
    use pretty_assertions::assert_eq;

    use super::*;

    fn area_spec() -> ChartSpec {
        ChartSpec::area(
            vec![ChartSeries::named("Tickets", vec![1.0, 2.0, 3.0])],
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
        )
        .expect("valid spec")
    }

    fn donut_spec() -> ChartSpec {
        ChartSpec::donut(
            vec![60.0, 25.0, 15.0],
            vec![
                "Resolved".to_string(),
                "Open".to_string(),
                "Critical".to_string(),
            ],
        )
        .expect("valid spec")
    }

    #[test]
    fn render_marks_the_handle_drawn() {
        let spec = area_spec();
        let mut handle = MemoryChartHandle {
            mount_id: "incoming-volume-chart".to_string(),
            series: initial_series(&spec),
            spec,
            options: ChartBaseOptions::for_theme(ThemePref::Light),
            rendered: false,
        };
        assert!(!handle.rendered());
        handle.render();
        assert!(handle.rendered());
        assert_eq!(handle.mount_id(), "incoming-volume-chart");
    }

    #[test]
    fn axis_charts_expose_their_named_series() {
        let backend = MemoryChartBackend;
        let handle = backend
            .construct(
                "incoming-volume-chart",
                area_spec(),
                ChartBaseOptions::for_theme(ThemePref::Light),
            )
            .expect("construct");
        assert_eq!(handle.series().len(), 1);
        assert_eq!(handle.series()[0].name.as_deref(), Some("Tickets"));
        assert_eq!(handle.series()[0].data, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn slice_charts_expose_one_anonymous_series() {
        let backend = MemoryChartBackend;
        let handle = backend
            .construct(
                "ticket-dist-chart",
                donut_spec(),
                ChartBaseOptions::for_theme(ThemePref::Dark),
            )
            .expect("construct");
        assert_eq!(handle.series().len(), 1);
        assert_eq!(handle.series()[0].name, None);
        assert_eq!(handle.series()[0].data, vec![60.0, 25.0, 15.0]);
    }

    #[test]
    fn option_patches_only_touch_the_patched_fields() {
        let backend = MemoryChartBackend;
        let mut handle = backend
            .construct(
                "incoming-volume-chart",
                area_spec(),
                ChartBaseOptions::for_theme(ThemePref::Light),
            )
            .expect("construct");
        let palette_before = handle.options().palette.clone();

        handle.update_options(ChartOptionsPatch {
            theme_mode: Some(ThemePref::Dark),
        });
        assert_eq!(handle.options().theme_mode, ThemePref::Dark);
        assert_eq!(handle.options().palette, palette_before);

        handle.update_options(ChartOptionsPatch::default());
        assert_eq!(handle.options().theme_mode, ThemePref::Dark);
    }

    #[test]
    fn series_updates_replace_data_but_not_the_spec() {
        let backend = MemoryChartBackend;
        let mut handle = backend
            .construct(
                "incoming-volume-chart",
                area_spec(),
                ChartBaseOptions::for_theme(ThemePref::Light),
            )
            .expect("construct");

        handle.update_series(vec![ChartSeries::named("Tickets", vec![9.0, 8.0, 7.0])]);
        assert_eq!(handle.series()[0].data, vec![9.0, 8.0, 7.0]);
        match handle.spec() {
            ChartSpec::Area { categories, .. } => assert_eq!(categories.len(), 3),
            other => panic!("unexpected spec shape: {other:?}"),
        }
    }
}
