// Gallery state - project category filter and detail modal
use crate::content::Project;

pub struct GalleryState {
    /// `None` shows every project.
    pub filter: Option<&'static str>,
    /// Index into the full project list; at most one modal at a time.
    pub open_project: Option<usize>,
}

impl GalleryState {
    pub fn new() -> Self {
        Self {
            filter: None,
            open_project: None,
        }
    }

    pub fn set_filter(&mut self, category: Option<&'static str>) {
        self.filter = category;
    }

    pub fn matches(&self, project: &Project) -> bool {
        self.filter.is_none_or(|c| project.category == c)
    }

    pub fn open_modal(&mut self, project_index: usize) {
        self.open_project = Some(project_index);
    }

    pub fn close_modal(&mut self) {
        self.open_project = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    #[test]
    fn test_no_filter_matches_everything() {
        let gallery = GalleryState::new();
        assert!(PROJECTS.iter().all(|p| gallery.matches(p)));
    }

    #[test]
    fn test_filter_keeps_only_matching_category() {
        let mut gallery = GalleryState::new();
        gallery.set_filter(Some("Tooling"));
        let shown: Vec<_> = PROJECTS.iter().filter(|p| gallery.matches(p)).collect();
        assert!(!shown.is_empty());
        assert!(shown.iter().all(|p| p.category == "Tooling"));
    }

    #[test]
    fn test_modal_open_close() {
        let mut gallery = GalleryState::new();
        gallery.open_modal(2);
        assert_eq!(gallery.open_project, Some(2));
        gallery.open_modal(4);
        assert_eq!(gallery.open_project, Some(4));
        gallery.close_modal();
        assert_eq!(gallery.open_project, None);
    }
}
