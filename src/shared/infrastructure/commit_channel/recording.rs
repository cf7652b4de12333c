use crate::shared::infrastructure::commit_channel::CommitChannel;

/// Keeps every commit instead of applying it.
#[derive(Debug)]
pub struct RecordingCommitChannel<Mutation> {
    pub commits: Vec<Mutation>,
}

impl<Mutation> Default for RecordingCommitChannel<Mutation> {
    fn default() -> Self {
        Self {
            commits: Vec::new(),
        }
    }
}

impl<Mutation> RecordingCommitChannel<Mutation> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Mutation> {
        self.commits.last()
    }
}

impl<Mutation> CommitChannel<Mutation> for RecordingCommitChannel<Mutation> {
    fn commit(&mut self, mutation: Mutation) {
        self.commits.push(mutation);
    }
}
