use crate::domain::types::UserId;
use crate::domain::user::User;
use crate::models::Resource;

impl Resource for User {
    type Id = UserId;

    const COLLECTION: &'static str = "users";
    const ENTITY_NAME: &'static str = "user";

    fn id(&self) -> UserId {
        self.id
    }
}
