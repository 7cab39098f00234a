use fsref_kit::builders;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG=fsref_kit=debug shows every created directory and written file
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // creates `<tmp>/<random>` on host
    let root = builders::create_temp_dir()?;
    println!("Temp dir: {}", root);

    // `docs` does not exist yet, it is created together with the file
    let docs = root.child_dir("docs")?;
    let first = docs.create_file_with_text("first.txt", "Hello")?;

    // any reader works; the caller keeps ownership of it
    let mut reader: &[u8] = b"World";
    let second = root
        .create_file_with_content_async("second.txt", &mut reader)
        .await?;

    println!("{} -> {}: {}", first, second, first.relative_path(&second)?);
    println!("{} -> {}: {}", second, docs, second.relative_path(&docs)?);
    println!("{} -> {}: {}", docs, docs, docs.relative_path(&docs)?);

    println!(
        "{}, {}!",
        std::fs::read_to_string(first.path())?,
        std::fs::read_to_string(second.path())?
    );

    std::fs::remove_dir_all(root.path())?;
    Ok(())
}
