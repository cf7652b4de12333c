pub mod shared {
    pub mod infrastructure {
        pub mod commit_channel;
    }
}

pub mod modules {
    pub mod map {
        pub mod core {
            pub mod evolve;
            pub mod mutations;
            pub mod pins;
            pub mod ports;
            pub mod state;
        }
        pub mod use_cases {
            pub mod read_map_flags {
                pub mod getters;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_map_pins {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
                pub mod projection;
            }
            pub mod dispatch_map_action {
                pub mod action;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod directory_in_memory;
                pub mod map_store;
            }
        }
    }
}

pub mod shell;
