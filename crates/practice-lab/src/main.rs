fn main() -> anyhow::Result<()> {
    practice_lab::cli::main()
}
