fn main() -> anyhow::Result<()> {
    tomekeeper::cli::run_cli()
}
