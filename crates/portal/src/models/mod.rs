//! Domain models for the portal.

pub mod admin_account;
pub mod badhai;
pub mod birthday;
pub mod member;
pub mod news;
pub mod sangathan;
pub mod shok;

pub use admin_account::{AdminAccount, CurrentAdmin};
pub use badhai::{Badhai, CreateBadhaiInput, UpdateBadhaiInput};
pub use birthday::{Birthday, CreateBirthdayInput, UpdateBirthdayInput};
pub use member::{CreateMemberInput, Member, UpdateMemberInput};
pub use news::{CreateNewsInput, News, UpdateNewsInput};
pub use sangathan::{CreateSangathanInput, Sangathan, UpdateSangathanInput};
pub use shok::{CreateShokInput, Shok, UpdateShokInput};
