//! Idempotent resource primitives (check + apply pattern).
pub mod error;
pub mod helpers;
pub mod link;

use anyhow::Result;

/// Minimal interface for resources that can be described and applied.
pub trait Applicable {
    /// Human-readable description of this resource.
    fn description(&self) -> String;

    /// Apply the resource change.
    ///
    /// This method should:
    /// - Create parent directories if needed
    /// - Bring the resource into the desired state
    /// - Return the appropriate `ResourceChange` result
    ///
    /// # Errors
    ///
    /// Returns an error if the resource cannot be applied due to I/O failures,
    /// permission issues, or other system errors.
    fn apply(&self) -> Result<ResourceChange>;
}

/// State of a resource on disk.
///
/// # Examples
///
/// ```
/// use dreport_links::resources::ResourceState;
///
/// let missing = ResourceState::Missing;
/// let other = ResourceState::Incorrect { current: "regular file".into() };
///
/// assert_ne!(missing, ResourceState::Correct);
/// assert_ne!(other, ResourceState::Correct);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceState {
    /// Resource does not exist.
    Missing,
    /// Resource exists and matches the desired state.
    Correct,
    /// Something else occupies the resource's location.
    Incorrect {
        /// Description of what is there now.
        current: String,
    },
}

/// Result of applying (or planning) a resource change.
///
/// # Examples
///
/// ```
/// use dreport_links::resources::ResourceChange;
///
/// let applied = ResourceChange::Applied;
/// let skipped = ResourceChange::Skipped { reason: "existing entry".into() };
///
/// assert_ne!(applied, ResourceChange::AlreadyCorrect);
/// assert!(matches!(skipped, ResourceChange::Skipped { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceChange {
    /// Resource was created.
    Applied,
    /// Resource was already in the desired state.
    AlreadyCorrect,
    /// Resource was left untouched.
    Skipped {
        /// Reason why the resource was skipped.
        reason: String,
    },
    /// Resource would have been created, but this is a dry run.
    DryRun,
}

/// Unified interface for resources that can be checked and applied.
///
/// # Examples
///
/// ```ignore
/// // All resources follow the same check-then-apply pattern:
/// match resource.ensure(dry_run)? {
///     ResourceChange::Applied => println!("created"),
///     _ => {}
/// }
/// ```
pub trait Resource: Applicable {
    /// Check the current state of the resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be determined.
    fn current_state(&self) -> Result<ResourceState>;

    /// Check the resource and create it only when missing.
    ///
    /// Resources never replace something already in place, so an
    /// [`ResourceState::Incorrect`] entry is reported as skipped.
    ///
    /// With `dry_run` set nothing is written and a missing resource reports
    /// [`ResourceChange::DryRun`].
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be determined or the change
    /// cannot be applied.
    fn ensure(&self, dry_run: bool) -> Result<ResourceChange> {
        match self.current_state()? {
            ResourceState::Missing if dry_run => Ok(ResourceChange::DryRun),
            ResourceState::Missing => self.apply(),
            ResourceState::Correct => Ok(ResourceChange::AlreadyCorrect),
            ResourceState::Incorrect { current } => Ok(ResourceChange::Skipped {
                reason: format!("existing entry left in place ({current})"),
            }),
        }
    }
}
