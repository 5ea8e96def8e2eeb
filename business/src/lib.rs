pub mod application {
    pub mod text {
        pub mod process;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod text {
        pub mod action;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod process;
        }
    }
}
