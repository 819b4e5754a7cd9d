use stars_server::{
    Config, Server, ServerState, init_logger_with_file, print_banner, setup_environment,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 设置环境 (dotenv)
    setup_environment();

    // 2. 加载配置
    let config = Config::from_env()?;

    // 3. 初始化日志
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    print_banner();
    tracing::info!(resource = %config.person.resource(), "⭐ Stars server starting...");

    // 4. 初始化服务器状态 (连接数据库)
    let state = ServerState::initialize(&config).await?;

    // 5. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
