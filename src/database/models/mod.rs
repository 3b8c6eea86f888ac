pub mod admin;
pub mod notice;

pub use admin::{Admin, AdminFilter, AdminPatch, NewAdmin};
pub use notice::{NewNotice, Notice, NoticeFilter, NoticePatch};
