pub mod admin_registrations;
