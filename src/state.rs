use std::path::{Path, PathBuf};

use crate::data::loader::load_series;
use crate::data::model::VacancySeries;

// ---------------------------------------------------------------------------
// Chart state
// ---------------------------------------------------------------------------

/// Everything the chart window shows, independent of rendering.
#[derive(Default)]
pub struct ChartState {
    /// Loaded series (None until a file loads successfully).
    pub series: Option<VacancySeries>,

    /// File the series came from.
    pub source: Option<PathBuf>,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl ChartState {
    /// State for an already loaded series.
    pub fn with_series(path: &Path, series: VacancySeries) -> Self {
        Self {
            series: Some(series),
            source: Some(path.to_path_buf()),
            status_message: None,
        }
    }

    /// Replace the series with the contents of `path`.
    ///
    /// On failure the previous series stays and the error is shown instead.
    pub fn load(&mut self, path: &Path) {
        match load_series(path) {
            Ok(series) => {
                log::info!("Loaded {} points from {}", series.len(), path.display());
                self.series = Some(series);
                self.source = Some(path.to_path_buf());
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn failed_reload_keeps_previous_series() {
        let mut good = tempfile::NamedTempFile::new().unwrap();
        write!(
            good,
            "Ref Date,Geo,National Occupation Classification,Recruitment Strategy,Statistics,Value\n\
             2023-01,Canada,a,b,Job vacancies,5\n"
        )
        .unwrap();

        let mut state = ChartState::default();
        state.load(good.path());
        assert_eq!(state.series.as_ref().map(VacancySeries::len), Some(1));
        assert!(state.status_message.is_none());

        let dir = tempfile::tempdir().unwrap();
        state.load(&dir.path().join("missing.csv"));
        assert_eq!(state.series.as_ref().map(VacancySeries::len), Some(1));
        assert_eq!(state.source.as_deref(), Some(good.path()));
        assert!(state.status_message.unwrap().starts_with("Error: file not found"));
    }
}
