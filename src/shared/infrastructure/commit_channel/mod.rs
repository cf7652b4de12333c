// Commit channel port.
//
// Purpose
// - The only way an action may change store state: it hands a named mutation
//   to the channel and the channel owner applies it.
//
// Testing guidance
// - Use `RecordingCommitChannel` to assert which mutations an action requested.

pub mod recording;

pub trait CommitChannel<Mutation> {
    fn commit(&mut self, mutation: Mutation);
}
