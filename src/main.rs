use anyhow::Context;

fn main() -> anyhow::Result<()> {
    boxmark::run().context("boxmark exited with an error")
}
