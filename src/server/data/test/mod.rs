mod pterodactyl_config;
mod server;
mod sync_log;
mod user_profile;
