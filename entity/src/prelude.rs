pub use super::admin_user::Entity as AdminUser;
pub use super::event::Entity as Event;
pub use super::news_post::Entity as NewsPost;
pub use super::payment_request::Entity as PaymentRequest;
pub use super::rule::Entity as Rule;
pub use super::store_item::Entity as StoreItem;
