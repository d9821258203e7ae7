mod layout;
pub use layout::AppLayout;

mod home;
pub use home::Home;

mod events;
pub use events::{Events, Timeline};

mod about;
pub use about::About;

mod members;
pub use members::Members;

mod clusters;
pub use clusters::Clusters;

mod leaderboard;
pub use leaderboard::Leaderboard;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod staff_login;
pub use staff_login::{AdminLogin, MasterLogin};

mod manage;

mod profile;
pub use profile::UserProfile;

mod admin_dashboard;
pub use admin_dashboard::AdminDashboard;

mod master_dashboard;
pub use master_dashboard::MasterDashboard;

mod fallback;
pub use fallback::{ComingSoon, NotFound, Unauthorized};
