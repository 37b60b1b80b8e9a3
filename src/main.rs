// This is my main entry point for the ledger CLI application
// Every command opens the sled database, wires up a Ledger over it and runs
// one operation; the pending-transaction queue lives in its own tree so that
// transactions survive between invocations until a block is mined.
use clap::Parser;
use ledgerdb::{
    Block, Command, Ledger, Opt, PendingPool, SledBlockStore, Transaction, GLOBAL_SETTINGS,
};
use log::{error, LevelFilter};
use std::process;

fn main() {
    // I initialize logging so mining progress and schedule changes are visible
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let opt = Opt::parse();

    if let Err(e) = run_command(opt.command) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run_command(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    // One database per node; the block store and the pending queue share it
    let db = sled::open(&GLOBAL_SETTINGS.db_path)?;
    let store = SledBlockStore::with_db(db.clone());
    let pool = PendingPool::new(db);
    let mut ledger = Ledger::new(store, GLOBAL_SETTINGS.params.clone());

    match command {
        // When I want to start the chain over from a fresh genesis block
        Command::Reset => {
            pool.clear()?;
            let genesis = ledger.reset()?;
            println!("{}", serde_json::to_string_pretty(&genesis)?);
        }
        // When I want to queue a transfer for the next mined block
        Command::Send {
            sender,
            recipient,
            amount,
        } => {
            let tx = Transaction::new(&sender, &recipient, amount)?;
            pool.add(&tx)?;
            println!("Queued transaction {}", tx.get_id());
        }
        // When I want to seal the queued transactions into the next block
        Command::Mine => {
            for tx in pool.all()? {
                ledger.submit_transaction(tx);
            }
            // The queue is only cleared once the block is safely persisted,
            // so a failed search leaves the queued transactions in place
            let block = ledger.mine()?;
            pool.clear()?;
            println!("{}", serde_json::to_string_pretty(&block)?);
        }
        Command::GetBlock { height } => match ledger.block_by_height(height)? {
            Some(block) => println!("{}", serde_json::to_string_pretty(&block)?),
            None => println!("No block at height {height}"),
        },
        Command::Top { metric, n } => {
            let blocks = ledger.top_blocks(&metric, n)?;
            if blocks.is_empty() {
                println!("No blocks for metric '{metric}'");
            } else {
                println!("{}", serde_json::to_string_pretty(&blocks)?);
            }
        }
        Command::LastBlocks { n } => {
            let blocks = ledger.last_n_blocks(n)?;
            println!("{}", serde_json::to_string_pretty(&blocks)?);
        }
        // When I want a quick look at the whole chain (useful for debugging)
        Command::Printchain => {
            let length = ledger.chain_length()?;
            for height in 1..=length {
                if let Some(block) = ledger.block_by_height(height)? {
                    print_block_summary(&block);
                }
            }
        }
    }
    Ok(())
}

fn print_block_summary(block: &Block) {
    println!("Block #{}", block.get_height());
    println!("  timestamp: {}", block.get_timestamp());
    println!(
        "  previous hash: {}",
        block.get_previous_hash().unwrap_or("None")
    );
    println!(
        "  merkle root: {}",
        block.get_merkle_root().unwrap_or("None")
    );
    println!("  transactions: {}", block.get_number_of_transactions());
    println!(
        "  nonce: {} (difficulty {}, bits {})",
        block.get_nonce(),
        block.get_difficulty(),
        block.get_difficulty_bits()
    );
    println!("  reward: {}", block.get_block_reward());
    println!(
        "  mined in {:.4}s at {:.0} hashes/s",
        block.get_elapsed_time(),
        block.get_hash_power()
    );
    println!();
}
