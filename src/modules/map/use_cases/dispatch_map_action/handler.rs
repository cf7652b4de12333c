use crate::modules::map::core::mutations::MapMutation;
use crate::modules::map::use_cases::dispatch_map_action::action::MapAction;
use crate::modules::map::use_cases::dispatch_map_action::decide::decide;
use crate::shared::infrastructure::commit_channel::CommitChannel;

pub fn dispatch(channel: &mut impl CommitChannel<MapMutation>, action: MapAction) {
    let mutation = decide(action);
    tracing::debug!(?action, mutation = mutation.name(), "dispatching map action");
    channel.commit(mutation);
}

pub fn set_add_mode(channel: &mut impl CommitChannel<MapMutation>, payload: bool) {
    dispatch(channel, MapAction::SetAddMode(payload));
}

/// Marks the map as ready. There is no way to un-ready it through an action.
pub fn set_map_ready(channel: &mut impl CommitChannel<MapMutation>) {
    dispatch(channel, MapAction::SetMapReady);
}

pub fn set_show_meetups(channel: &mut impl CommitChannel<MapMutation>, payload: bool) {
    dispatch(channel, MapAction::SetShowMeetups(payload));
}
