//! Scene loading seam

/// The engine's scene loader
pub trait SceneDirector {
    /// Build index of the scene being played
    fn active_scene_index(&self) -> usize;

    /// Number of scenes in the build
    fn scene_count(&self) -> usize;

    /// Switch to another scene
    fn load_scene(&mut self, index: usize);
}

/// Scene that follows `current`, wrapping to the first after the last
pub fn next_scene_index(current: usize, scene_count: usize) -> usize {
    let next = current + 1;
    if next >= scene_count {
        0
    } else {
        next
    }
}

/// An ordered list of named scenes
#[derive(Debug, Clone)]
pub struct SceneList {
    names: Vec<String>,
    active: usize,
    /// Every index passed to `load_scene`, in order
    history: Vec<usize>,
}

impl SceneList {
    /// Create a list starting at the first scene
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            active: 0,
            history: Vec::new(),
        }
    }

    /// Start at a different scene
    pub fn with_active(mut self, index: usize) -> Self {
        if index < self.names.len() {
            self.active = index;
        }
        self
    }

    /// Name of the active scene
    pub fn active_name(&self) -> Option<&str> {
        self.names.get(self.active).map(String::as_str)
    }

    /// Loads requested so far
    pub fn history(&self) -> &[usize] {
        &self.history
    }
}

impl SceneDirector for SceneList {
    fn active_scene_index(&self) -> usize {
        self.active
    }

    fn scene_count(&self) -> usize {
        self.names.len()
    }

    fn load_scene(&mut self, index: usize) {
        match self.names.get(index) {
            Some(name) => {
                log::info!("Loading scene {} ({})", index, name);
                self.active = index;
                self.history.push(index);
            }
            None => {
                log::warn!("Scene index {} out of range ({} scenes)", index, self.names.len());
            }
        }
    }
}
