//@ --type Config --constructors all-args,builder

pub struct Config {
    host: String,
    #[constructor(all_args_only)]
    port: u16,
    #[constructor(builder_only)]
    retries: u32,
}
