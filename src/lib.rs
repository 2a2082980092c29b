pub mod shared {
    pub mod infrastructure {
        pub mod yaml_file;
    }
}

pub mod modules {
    pub mod club_orders {
        pub mod core {
            pub mod aggregate;
            pub mod catalog;
            pub mod evolve;
            pub mod order;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod place_order {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod form;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                    pub mod notice;
                    pub mod view;
                }
            }
            pub mod view_overview {
                pub mod handler;
                pub mod projection;
                pub mod inbound {
                    pub mod http;
                    pub mod view;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod in_memory_aggregate_store;
                pub mod in_memory_notifier;
                pub mod notifications;
                pub mod pushover;
                pub mod recaptcha;
                pub mod smtp_mailer;
                pub mod static_captcha;
                pub mod yaml_aggregate_store;
            }
        }
    }
}

pub mod shell;
