use crate::contract::model::User;
use crate::infra::storage::entity::UserEntity;

/// Convert a persisted entity to a contract model
pub fn entity_to_contract(entity: UserEntity) -> User {
    User {
        id: entity.id,
        name: entity.name,
        email: entity.email,
        gender: entity.gender,
        date_of_birth: entity.date_of_birth,
        phone: entity.phone,
        department: entity.department,
    }
}

/// Convert a contract model to its persisted form
pub fn contract_to_entity(user: &User) -> UserEntity {
    UserEntity {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        gender: user.gender,
        date_of_birth: user.date_of_birth,
        phone: user.phone.clone(),
        department: user.department,
    }
}
