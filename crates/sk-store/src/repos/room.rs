//! Room repository.

use sk_core::entities::Room;
use sk_core::identity::EntityId;

use crate::EntityStore;
use crate::error::StoreError;

impl EntityStore {
    pub fn add_room(&mut self, name: &str, floor: &str) -> Result<Room, StoreError> {
        let room = Room {
            id: Self::take_id(&mut self.ids.room),
            name: name.to_string(),
            floor: floor.to_string(),
            notes: String::new(),
        };
        self.tables.rooms.push(room.clone());
        tracing::info!(id = room.id, name, "added room");
        Ok(room)
    }

    /// Delete a room and every endpoint located in it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the room does not exist.
    pub fn delete_room(&mut self, id: EntityId) -> Result<(), StoreError> {
        if self.tables.room(id).is_none() {
            return Err(StoreError::NotFound { table: "room", id });
        }
        self.tables.endpoints.retain(|e| e.room_id != id);
        self.tables.rooms.retain(|r| r.id != id);
        tracing::info!(id, "deleted room");
        Ok(())
    }
}
