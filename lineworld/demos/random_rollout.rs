use lineworld::rollout::{RandomPolicy, RolloutConfig, run_episode};
use lineworld::{LineWorld, LineWorldConfig, RenderMode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = LineWorldConfig::with_size(7).render_mode(RenderMode::Human);
    let mut env = LineWorld::new(config)?;
    let mut policy = RandomPolicy::new(7);

    let cfg = RolloutConfig {
        max_steps: Some(40),
        seed: Some(7),
    };
    let trajectory = run_episode(&mut env, &mut policy, &cfg)?;
    println!(
        "episode {}: {} steps, return {}, grabbed the banana: {}",
        trajectory.id,
        trajectory.len(),
        trajectory.total_reward(),
        trajectory.terminated()
    );

    println!("{}", serde_json::to_string_pretty(&trajectory.samples.last())?);
    Ok(())
}
