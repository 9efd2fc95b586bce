//! Room membership state.
//!
//! Two indexes are kept in lockstep:
//!
//! - room ID → members in join order
//! - identity ID → the one room that identity is in
//!
//! After every operation an identity is indexed to room `r` exactly when one
//! of its participants is listed in `r`, and a room with no members has no
//! entry at all.

use std::collections::HashMap;

use super::{
    entity::{Participant, Room},
    value_object::{IdentityId, RoomId, SessionId},
};

/// Result of [`RoomMembership::join`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    /// The identity was not in any room before
    Joined,
    /// The identity was already tracked; its previous membership was removed
    /// before joining. `previous_room` may equal the new room.
    Moved {
        previous_room: RoomId,
        previous_session: SessionId,
    },
}

/// Result of [`RoomMembership::leave`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaveOutcome {
    /// Removed from the room; `room_closed` is true when it was the last member
    Left { room_id: RoomId, room_closed: bool },
    /// The identity is not in any room
    NotJoined,
    /// The identity is in `room_id`, but through a newer session
    StaleSession { room_id: RoomId },
}

#[derive(Debug, Clone, Default)]
pub struct RoomMembership {
    members_by_room: HashMap<RoomId, Vec<Participant>>,
    room_by_identity: HashMap<IdentityId, RoomId>,
}

impl RoomMembership {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `participant` to `room_id`, creating the room if needed.
    ///
    /// An identity that is already tracked is first removed from its current
    /// room, so an identity never sits in two rooms (or twice in one room).
    pub fn join(&mut self, participant: Participant, room_id: RoomId) -> JoinOutcome {
        let outcome = match self.remove_identity(&participant.identity_id) {
            Some((previous_room, previous)) => JoinOutcome::Moved {
                previous_room,
                previous_session: previous.session_id,
            },
            None => JoinOutcome::Joined,
        };

        self.room_by_identity
            .insert(participant.identity_id.clone(), room_id.clone());
        self.members_by_room
            .entry(room_id)
            .or_default()
            .push(participant);

        outcome
    }

    /// Remove `participant` from its room.
    ///
    /// Leaving is matched by identity, but only the session currently holding
    /// the membership may end it. Calling this again after a successful leave
    /// returns [`LeaveOutcome::NotJoined`] and changes nothing.
    pub fn leave(&mut self, participant: &Participant) -> LeaveOutcome {
        let Some(room_id) = self.room_by_identity.get(&participant.identity_id).cloned() else {
            return LeaveOutcome::NotJoined;
        };

        let holds_membership = self
            .members_by_room
            .get(&room_id)
            .and_then(|members| {
                members
                    .iter()
                    .find(|m| m.identity_id == participant.identity_id)
            })
            .map(|member| member.is_same_session(participant));

        match holds_membership {
            Some(true) => {
                self.remove_identity(&participant.identity_id);
                let room_closed = !self.members_by_room.contains_key(&room_id);
                LeaveOutcome::Left {
                    room_id,
                    room_closed,
                }
            }
            Some(false) => LeaveOutcome::StaleSession { room_id },
            None => {
                // index entry without a listed member; drop it
                self.room_by_identity.remove(&participant.identity_id);
                LeaveOutcome::NotJoined
            }
        }
    }

    /// Room the identity currently occupies
    pub fn room_of(&self, identity_id: &IdentityId) -> Option<&RoomId> {
        self.room_by_identity.get(identity_id)
    }

    /// Room held by this exact session.
    ///
    /// `None` when the identity is not in a room, or is in one through a
    /// different session.
    pub fn current_room(&self, participant: &Participant) -> Option<&RoomId> {
        let room_id = self.room_by_identity.get(&participant.identity_id)?;
        self.members_by_room
            .get(room_id)?
            .iter()
            .any(|m| m.is_same_session(participant))
            .then_some(room_id)
    }

    /// Members of a room in join order; `None` when the room does not exist
    pub fn members(&self, room_id: &RoomId) -> Option<&[Participant]> {
        self.members_by_room.get(room_id).map(Vec::as_slice)
    }

    /// Snapshot of one room
    pub fn room(&self, room_id: &RoomId) -> Option<Room> {
        self.members_by_room.get(room_id).map(|members| Room {
            id: room_id.clone(),
            participants: members.clone(),
        })
    }

    /// Snapshot of every room, sorted by room ID
    pub fn rooms(&self) -> Vec<Room> {
        let mut rooms: Vec<Room> = self
            .members_by_room
            .iter()
            .map(|(id, members)| Room {
                id: id.clone(),
                participants: members.clone(),
            })
            .collect();
        rooms.sort_by(|a, b| a.id.cmp(&b.id));
        rooms
    }

    pub fn room_count(&self) -> usize {
        self.members_by_room.len()
    }

    pub fn participant_count(&self) -> usize {
        self.room_by_identity.len()
    }

    /// Drop the identity from both indexes, closing the room if it empties.
    fn remove_identity(&mut self, identity_id: &IdentityId) -> Option<(RoomId, Participant)> {
        let room_id = self.room_by_identity.remove(identity_id)?;
        let members = self.members_by_room.get_mut(&room_id)?;
        let position = members.iter().position(|m| &m.identity_id == identity_id)?;
        let removed = members.remove(position);
        if members.is_empty() {
            self.members_by_room.remove(&room_id);
        }
        Some((room_id, removed))
    }
}
