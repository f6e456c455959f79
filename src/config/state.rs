// src/config/state.rs
use crate::data::DataTypeFilter;
use super::consts::ALL_OPTION;
use super::options::AppOptions;

/// Per-session filter/selection state. Starts as (none, All, All) and is only
/// changed by explicit user actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    /// Canonical name; may point at a record the current filters hide.
    pub selected_jurisdiction: Option<String>,
    pub data_type: DataTypeFilter,
    /// `"All"` or a region name.
    pub region: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            selected_jurisdiction: None,
            data_type: DataTypeFilter::All,
            region: s!(ALL_OPTION),
        }
    }
}

impl FilterState {
    pub fn select(&mut self, name: impl Into<String>) {
        let name = name.into();
        logd!("Filter: Select {}", name);
        self.selected_jurisdiction = Some(name);
    }

    pub fn clear_selection(&mut self) { self.selected_jurisdiction = None; }

    pub fn set_data_type(&mut self, f: DataTypeFilter) {
        if self.data_type != f {
            logf!("Filter: Data type {:?} → {:?}", self.data_type, f);
            self.data_type = f;
        }
    }

    pub fn set_region(&mut self, region: impl Into<String>) {
        let region = region.into();
        if self.region != region {
            logf!("Filter: Region {} → {}", self.region, region);
            self.region = region;
        }
    }

    #[inline]
    pub fn region_is_all(&self) -> bool { self.region == ALL_OPTION }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1200,
            window_h: 760,
            current_page_index: 0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub filters: FilterState,
    pub gui: GuiState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unfiltered() {
        let f = FilterState::default();
        assert_eq!(f.selected_jurisdiction, None);
        assert_eq!(f.data_type, DataTypeFilter::All);
        assert!(f.region_is_all());
    }

    #[test]
    fn filter_changes_keep_selection() {
        let mut f = FilterState::default();
        f.select("Ohio");
        f.set_region("Northeast");
        f.set_data_type(DataTypeFilter::CivilRights);
        assert_eq!(f.selected_jurisdiction.as_deref(), Some("Ohio"));
    }
}
