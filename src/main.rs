use anyhow::Result;
use mbe_model_eval::utils::logging;
use mbe_model_eval::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env()?;

    // 运行评测
    App::new(config).run().await?;

    Ok(())
}
