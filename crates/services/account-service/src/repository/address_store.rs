//! Address store. One row per user, keyed by the owner's id.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};
use uuid::Uuid;

use super::entities::address::{ActiveModel, Entity as AddressEntity};
use common::{AppError, AppResult};
use domain::Address;

pub struct AddressStore<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AddressStore<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Fetch the address owned by `user_id`.
    pub async fn find(&self, user_id: Uuid) -> AppResult<Address> {
        let model = AddressEntity::find_by_id(user_id)
            .one(self.db)
            .await
            .map_err(AppError::from_address_store)?
            .ok_or(AppError::AddressNotFound)?;

        Ok(Address::from(model))
    }

    pub async fn create(&self, address: &Address) -> AppResult<Address> {
        let model = to_active_model(address)
            .insert(self.db)
            .await
            .map_err(AppError::from_address_store)?;

        tracing::debug!(user_id = %model.user_id, "Address created");
        Ok(Address::from(model))
    }

    /// Overwrite every column of the address keyed by `address.user_id`.
    pub async fn update(&self, address: &Address) -> AppResult<Address> {
        let model = to_active_model(address)
            .update(self.db)
            .await
            .map_err(AppError::from_address_store)?;

        Ok(Address::from(model))
    }
}

fn to_active_model(address: &Address) -> ActiveModel {
    ActiveModel {
        user_id: Set(address.user_id),
        address_line: Set(address.address_line.clone()),
        city: Set(address.city.clone()),
        locality: Set(address.locality.clone()),
        administrative_area_level_1: Set(address.administrative_area_level_1.clone()),
        country: Set(address.country.clone()),
        postal_code: Set(address.postal_code),
    }
}
