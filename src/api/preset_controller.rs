use tracing::{debug, warn};

use crate::core::{ResolvedPreset, default_presets, resolve_presets};
use crate::interaction::CloseMode;
use crate::render::CalendarRenderer;

use super::{CalendarEngine, PresetSource};

impl<R: CalendarRenderer> CalendarEngine<R> {
    /// Opens or closes the preset panel. Opening snapshots the
    /// rollback point and force-closes the calendar grid.
    pub fn preset_toggle(&mut self) {
        if matches!(self.core.preset_source, PresetSource::Disabled) {
            return;
        }

        if self.core.selection.preset_is_open() {
            self.core.selection.set_preset_open(false);
        } else {
            self.core.selection.snapshot_originals();
            self.core.selection.set_preset_open(true);
        }

        if self.core.selection.cal_is_open() {
            self.close(CloseMode::Force);
        }

        debug!(
            open = self.core.selection.preset_is_open(),
            "preset panel toggled"
        );
    }

    /// The preset rows for the current configuration, clamped into
    /// bounds. Built-in rows anchor at the configured latest bound, or
    /// at the reference today when no latest bound was given.
    #[must_use]
    pub fn resolved_presets(&self) -> Vec<ResolvedPreset> {
        let bounds = self.core.bounds;
        match &self.core.preset_source {
            PresetSource::Disabled => Vec::new(),
            PresetSource::BuiltIn => {
                let anchor = if self.core.latest_is_explicit {
                    bounds.latest()
                } else {
                    self.core.today
                };
                resolve_presets(
                    &default_presets(anchor, bounds),
                    bounds,
                    &self.core.formats.preset,
                )
            }
            PresetSource::Custom(definitions) => {
                resolve_presets(definitions, bounds, &self.core.formats.preset)
            }
        }
    }

    /// One-click selection: sets start/end directly from the resolved
    /// preset (bypassing text resolution), closes the panel, and
    /// commits immediately.
    pub fn select_preset(&mut self, index: usize) {
        let presets = self.resolved_presets();
        let Some(preset) = presets.get(index) else {
            warn!(index, count = presets.len(), "preset index out of range");
            return;
        };

        if !self.core.selection.preset_is_open() {
            self.core.selection.snapshot_originals();
        }

        self.core.selection.set_start(Some(preset.start));
        self.core.selection.set_end(Some(preset.end));
        self.sync_field_texts();
        debug!(label = %preset.label, start = %preset.start, end = %preset.end, "preset applied");

        if self.core.selection.preset_is_open() {
            self.preset_toggle();
        }
        self.commit();
    }
}
