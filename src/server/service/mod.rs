//! Service layer between the controllers and the gateway.
//!
//! Services validate request parameters, read from the gateway cache, and hand mutating
//! work to the gateway executor through the bridge. They return view-model DTOs or
//! moderation outcomes and know nothing about HTTP.
//!
//! - **Guild** (`guild`) - Guild list and team page view models, member filtering
//! - **Moderation** (`moderation`) - Kick, ban and leave requests

pub mod guild;
pub mod moderation;
