pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod clock;
        pub mod media_gateway;
    }
}

pub mod modules {
    pub mod shifts {
        pub mod core {
            pub mod session;
            pub mod status;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod sessions;
            }
        }
        pub mod use_cases {
            pub mod error;
            pub mod start_shift {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod start_break {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod end_break {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod end_shift {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod shift_status {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod meetings {
        pub mod core {
            pub mod meeting;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod meetings;
            }
        }
        pub mod use_cases {
            pub mod error;
            pub mod start_meeting {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod end_meeting {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod leads {
        pub mod core {
            pub mod audit;
            pub mod lead;
            pub mod transition;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod leads;
            }
        }
        pub mod use_cases {
            pub mod error;
            pub mod update_lead {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod lead_history {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
