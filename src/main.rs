//! Informational entry point for the throw simulator

fn main() {
    println!("Throw Simulator v0.1.0");
    println!();
    println!("Estimates the minimum release speed a throw needs to cover a target");
    println!("distance under wind and spin, and renders the resulting arc.");
    println!();
    println!("For the full command-line interface, use:");
    println!("  throwsim-cli estimate --distance 300 --angle 35");
    println!("  throwsim-cli trajectory --distance 300 --angle 35 --full");
    println!("  throwsim-cli spread --distance 300 --angle 35 --num-sims 1000");
    println!();
    println!("To use as a Rust library:");
    println!("  Add to Cargo.toml: throwsim = \"0.1\"");
}
