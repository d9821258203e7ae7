//! Small building blocks shared by every page.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::Input;

mod notice;
pub use notice::{Notice, NoticeKind};

mod spinner;
pub use spinner::Spinner;

mod avatar;
pub use avatar::Avatar;
