//! Font cache keyed by pixel size.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use super::{Face, FontSource};

/// Lookup-or-load cache of sized faces.
///
/// Safe to share across rendering threads. Two threads missing on the same
/// size both build the face and one insert wins; the faces are identical.
#[derive(Debug)]
pub struct FontCache {
    source: FontSource,
    faces: RwLock<HashMap<u32, Arc<Face>>>,
}

impl FontCache {
    pub fn new(source: FontSource) -> Self {
        Self {
            source,
            faces: RwLock::new(HashMap::new()),
        }
    }

    /// Resolve the source from candidate paths.
    pub fn from_candidates(candidates: &[PathBuf]) -> Self {
        Self::new(FontSource::resolve(candidates))
    }

    /// A cache that always uses the builtin bitmap font.
    pub fn builtin() -> Self {
        Self::new(FontSource::Builtin)
    }

    pub fn source(&self) -> &FontSource {
        &self.source
    }

    /// Face for a pixel size, loading it on first use.
    pub fn get(&self, px: u32) -> Arc<Face> {
        {
            let faces = self.faces.read().unwrap_or_else(|e| e.into_inner());
            if let Some(face) = faces.get(&px) {
                return Arc::clone(face);
            }
        }

        let face = Arc::new(self.source.face(px));
        let mut faces = self.faces.write().unwrap_or_else(|e| e.into_inner());
        Arc::clone(faces.entry(px).or_insert(face))
    }

    /// Number of sizes loaded so far.
    pub fn len(&self) -> usize {
        self.faces.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_size_returns_same_face() {
        let cache = FontCache::builtin();
        let a = cache.get(24);
        let b = cache.get(24);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_sizes_are_cached_separately() {
        let cache = FontCache::builtin();
        cache.get(16);
        cache.get(28);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_shared_across_threads() {
        let cache = Arc::new(FontCache::builtin());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || cache.get(16).line_height())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 16);
        }
        assert_eq!(cache.len(), 1);
    }
}
