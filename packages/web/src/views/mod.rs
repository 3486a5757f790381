mod home;
pub use home::Home;

mod locale_redirect;
pub use locale_redirect::LocaleRedirect;

mod not_found;
pub use not_found::PageNotFound;
