// Composition root for the club_orders bounded context.
//
// - Read settings from the environment and config files.
// - Instantiate the YAML store and the enabled outbound channels.
// - Wire them into the use case handlers and the router.

pub mod config;
pub mod html;
pub mod http;
pub mod state;
