// `cluster-agent version`: prints the version compiled into the binary.

pub fn run() -> i32 {
    println!("cluster-agent {}", env!("CARGO_PKG_VERSION"));
    0
}
