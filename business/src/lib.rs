pub mod application {
    pub mod auth {
        pub mod authorize;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod find;
        pub mod get_by_id;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod auth {
        pub mod errors;
        pub mod services;
        pub mod use_cases {
            pub mod authorize;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod find;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod shared {
        pub mod context;
        pub mod value_objects;
    }
}
