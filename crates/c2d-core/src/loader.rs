//! Asynchronous image loading.
//!
//! Hosts implement [`ImageLoader`] and drive a [`PendingLoad`] from their
//! decode notifications. The completion callback runs at most once and only
//! after a successful decode. Failures never reach the caller.

use std::fmt;

/// Completion callback receiving the decoded image.
pub type LoadCallback<I> = Box<dyn FnOnce(I)>;

/// Starts image fetch/decode on the host.
pub trait ImageLoader {
    type Image;

    /// Begin loading `path`. `on_load` fires once the image has decoded;
    /// it never fires if the load fails.
    fn load(&self, path: &str, on_load: Option<LoadCallback<Self::Image>>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Loaded,
    Failed,
}

/// One in-flight load: the requested path plus the callback waiting for it.
pub struct PendingLoad<I> {
    path: String,
    on_load: Option<LoadCallback<I>>,
    state: LoadState,
}

impl<I> PendingLoad<I> {
    pub fn new(path: impl Into<String>, on_load: Option<LoadCallback<I>>) -> Self {
        let path = path.into();
        log::debug!("loading image {path}");
        Self {
            path,
            on_load,
            state: LoadState::Pending,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Deliver a decoded image. Returns `false` if the load had already
    /// settled, in which case the image is dropped.
    pub fn complete(&mut self, image: I) -> bool {
        if self.state != LoadState::Pending {
            log::trace!("ignoring repeated completion for {}", self.path);
            return false;
        }
        self.state = LoadState::Loaded;
        log::debug!("image {} decoded", self.path);
        if let Some(on_load) = self.on_load.take() {
            on_load(image);
        }
        true
    }

    /// Mark the load as failed and drop the callback unfired.
    pub fn fail(&mut self) {
        if self.state != LoadState::Pending {
            return;
        }
        self.state = LoadState::Failed;
        self.on_load = None;
        log::warn!("image {} failed to load", self.path);
    }
}

impl<I> fmt::Debug for PendingLoad<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingLoad")
            .field("path", &self.path)
            .field("state", &self.state)
            .field("has_callback", &self.on_load.is_some())
            .finish()
    }
}
