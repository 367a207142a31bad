pub mod modules {
    pub mod client_config {
        pub mod core {
            pub mod payload;
            pub mod settings;
        }
        pub mod use_cases {
            pub mod serve_client_config {
                pub mod handler;
                pub mod render;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod settings_source;
                pub mod settings_source_in_memory;
            }
        }
    }
    pub mod inventory_update {
        pub mod core {
            pub mod metrics;
            pub mod period;
            pub mod product_code;
            pub mod report;
            pub mod table;
        }
        pub mod use_cases {
            pub mod update_inventory {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod workbook;
                pub mod workbook_calamine;
                pub mod workbook_xlsx;
            }
        }
    }
}

pub mod shell;
