use std::collections::BTreeMap;
use std::collections::BTreeSet;

use rand::Rng;

use deskboard_core::charts::advance_live_series;
use deskboard_core::charts::chart_catalog;
use deskboard_core::charts::ChartBaseOptions;
use deskboard_core::charts::ChartId;
use deskboard_core::charts::ChartOptionsPatch;
use deskboard_core::charts::ChartSeries;
use deskboard_core::charts::LIVE_CHART;
use deskboard_core::charts::LIVE_POINT_MAX;
use deskboard_core::charts::LIVE_POINT_MIN;
use deskboard_core::state::ThemePref;

use crate::contracts::ChartBackend;
use crate::contracts::ChartBackendError;
use crate::contracts::ChartHandle;

/// Owns every mounted chart handle for the lifetime of the console.
pub struct ChartRegistry {
    backend: Box<dyn ChartBackend>,
    handles: BTreeMap<ChartId, Box<dyn ChartHandle>>,
}

impl ChartRegistry {
    pub fn new(backend: Box<dyn ChartBackend>) -> Self {
        Self {
            backend,
            handles: BTreeMap::new(),
        }
    }

    /// Construct and render a handle for every catalog chart whose mount is
    /// present. Absent mounts are skipped, not errors. Returns how many
    /// charts were mounted.
    pub fn initialize(
        &mut self,
        mounts: &BTreeSet<String>,
        theme: ThemePref,
    ) -> Result<usize, ChartBackendError> {
        let mut mounted = 0;
        for entry in chart_catalog()? {
            let mount_id = entry.id.mount_id();
            if !mounts.contains(mount_id) {
                continue;
            }
            let mut handle = self.backend.construct(
                mount_id,
                entry.spec,
                ChartBaseOptions::for_theme(theme),
            )?;
            handle.render();
            self.handles.insert(entry.id, handle);
            mounted += 1;
        }
        Ok(mounted)
    }

    /// Restyle every mounted chart for the new theme. Series data is left
    /// alone.
    pub fn retheme(&mut self, theme: ThemePref) {
        let patch = ChartOptionsPatch {
            theme_mode: Some(theme),
        };
        for handle in self.handles.values_mut() {
            handle.update_options(patch.clone());
        }
    }

    pub fn tick(&mut self) {
        let next = rand::rng().random_range(LIVE_POINT_MIN..LIVE_POINT_MAX);
        self.tick_with(next as f64);
    }

    /// Roll the live intake series forward by one point, reading the current
    /// data back from the handle. No-op when the live chart is not mounted.
    pub fn tick_with(&mut self, value: f64) {
        let Some(handle) = self.handles.get_mut(&LIVE_CHART) else {
            return;
        };
        let Some(first) = handle.series().first() else {
            return;
        };
        let name = first.name.clone();
        let mut data = first.data.clone();
        advance_live_series(&mut data, value);
        handle.update_series(vec![ChartSeries { name, data }]);
    }

    pub fn contains(&self, id: ChartId) -> bool {
        self.handles.contains_key(&id)
    }

    pub fn handle(&self, id: ChartId) -> Option<&dyn ChartHandle> {
        self.handles.get(&id).map(|handle| handle.as_ref())
    }

    pub fn series_of(&self, id: ChartId) -> Option<&[ChartSeries]> {
        self.handles.get(&id).map(|handle| handle.series())
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
