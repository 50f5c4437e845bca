//! Existence-aware winner selection.
//!
//! Selection is a left fold seeded with the all-zero sentinel candidate. With
//! shuffle enabled, candidates whose file is already in the wallpaper
//! directory are excluded first; that needs one filesystem probe per
//! candidate, all run concurrently before the fold.
//!
//! ## Join policy for probes
//! Best effort: every probe settles, and a failed probe (or a probe task
//! that died) counts as "not downloaded" so the candidate stays eligible.

use listing::{Candidate, SelectionConfig, SortMode, url_file_path};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info, instrument, warn};

use crate::probe::FileProbe;
use crate::scoring::{controversy, heat};

/// Whether `challenger` should replace `incumbent` under `sort`.
///
/// Strictly greater only: on a tie the incumbent (the earlier candidate) stays.
pub fn outranks(sort: SortMode, challenger: &Candidate, incumbent: &Candidate) -> bool {
    match sort {
        SortMode::Top => challenger.score > incumbent.score,
        SortMode::Hot => heat(challenger) > heat(incumbent),
        SortMode::Controversial => controversy(challenger) > controversy(incumbent),
        SortMode::New => challenger.created_at > incumbent.created_at,
    }
}

/// Fold candidates into a single winner, starting from the sentinel.
///
/// Returns the sentinel when nothing beats it; check
/// [`Candidate::is_sentinel`] before using the result.
pub fn fold_winner(candidates: impl IntoIterator<Item = Candidate>, sort: SortMode) -> Candidate {
    candidates
        .into_iter()
        .fold(Candidate::default(), |winner, candidate| {
            if outranks(sort, &candidate, &winner) {
                candidate
            } else {
                winner
            }
        })
}

/// Picks the wallpaper for a run.
#[derive(Debug, Clone)]
pub struct Reducer {
    sort: SortMode,
    shuffle: bool,
    directory: PathBuf,
}

impl Reducer {
    /// Create a reducer that folds without excluding anything.
    pub fn new(sort: SortMode) -> Self {
        Self {
            sort,
            shuffle: false,
            directory: PathBuf::from("."),
        }
    }

    pub fn from_config(config: &SelectionConfig) -> Self {
        Self {
            sort: config.sort,
            shuffle: config.shuffle,
            directory: config.directory.clone(),
        }
    }

    /// Skip candidates already downloaded into `directory` (builder pattern).
    pub fn with_shuffle(mut self, directory: impl Into<PathBuf>) -> Self {
        self.shuffle = true;
        self.directory = directory.into();
        self
    }


    /// Pick the winner among `candidates`.
    ///
    /// # Returns
    /// The winning candidate, or the sentinel if none is eligible.
    #[instrument(skip(self, candidates, probe), fields(sort = %self.sort, shuffle = self.shuffle))]
    pub async fn select<P: FileProbe>(&self, candidates: Vec<Candidate>, probe: Arc<P>) -> Candidate {
        let eligible = if self.shuffle {
            let before = candidates.len();
            let remaining = self.exclude_downloaded(candidates, probe).await;
            info!(
                "Excluded {} already downloaded candidates, {} remain",
                before - remaining.len(),
                remaining.len()
            );
            remaining
        } else {
            candidates
        };

        fold_winner(eligible, self.sort)
    }

    /// Drop candidates whose target file already exists, keeping order.
    ///
    /// Candidates without a derivable file name are never probed and always
    /// kept.
    pub async fn exclude_downloaded<P: FileProbe>(
        &self,
        candidates: Vec<Candidate>,
        probe: Arc<P>,
    ) -> Vec<Candidate> {
        let mut tasks = JoinSet::new();
        for (index, candidate) in candidates.iter().enumerate() {
            let Some(path) = url_file_path(&self.directory, &candidate.url) else {
                continue;
            };
            let probe = Arc::clone(&probe);
            tasks.spawn(async move {
                let exists = probe.is_file(&path).await;
                (index, path, exists)
            });
        }

        let mut downloaded = vec![false; candidates.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, path, Ok(exists))) => {
                    if exists {
                        debug!("Already downloaded: {}", path.display());
                    }
                    downloaded[index] = exists;
                }
                Ok((_, path, Err(e))) => {
                    debug!("Probe failed for {}, treating as absent: {}", path.display(), e);
                }
                Err(e) => {
                    warn!("Probe task failed, treating as absent: {}", e);
                }
            }
        }

        candidates
            .into_iter()
            .zip(downloaded)
            .filter_map(|(candidate, exists)| (!exists).then_some(candidate))
            .collect()
    }
}
