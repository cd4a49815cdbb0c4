/// chat session - drive the dispatcher the way a transport binding would
use fincalc_rs::{BotConfig, ChatId, Command, Dispatcher};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut bot = Dispatcher::new(BotConfig::default());
    let chat: ChatId = 42;

    println!("> /start");
    println!("{}\n", bot.start_message());

    // text before any command selection
    println!("> 100000 12 12");
    println!("{}\n", bot.handle_text(chat, "100000 12 12"));

    println!("> /credit");
    println!("{}\n", bot.handle_command(chat, Command::Credit));

    println!("> 100000 12 12");
    println!("{}\n", bot.handle_text(chat, "100000 12 12"));

    // a typo gets the validator's message back, verbatim
    println!("> -1 5 12");
    println!("{}\n", bot.handle_text(chat, "-1 5 12"));

    println!("> /deposit");
    println!("{}\n", bot.handle_command(chat, Command::Deposit));

    println!("> 10000 6 12");
    println!("{}", bot.handle_text(chat, "10000 6 12"));

    Ok(())
}
