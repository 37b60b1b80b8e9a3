use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "ledgerdb")]
pub struct Opt {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "reset", about = "Drop all blocks and re-seed the genesis block")]
    Reset,
    #[command(name = "send", about = "Queue a transaction for the next mined block")]
    Send {
        #[arg(help = "Sender address")]
        sender: String,
        #[arg(help = "Recipient address")]
        recipient: String,
        #[arg(help = "Amount of tokens")]
        amount: f64,
    },
    #[command(name = "mine", about = "Mine the next block from the queued transactions")]
    Mine,
    #[command(name = "getblock", about = "Print the block at the given height")]
    GetBlock {
        #[arg(help = "Block height, starting at 1")]
        height: u64,
    },
    #[command(
        name = "top",
        about = "Print the top N blocks ranked by a metric (difficulty, elapsed_time, \
                 block_reward, hash_power, height, nonce, number_of_transactions)"
    )]
    Top {
        #[arg(help = "Metric to rank by")]
        metric: String,
        #[arg(help = "Number of blocks")]
        n: usize,
    },
    #[command(name = "lastblocks", about = "Print the most recent N blocks")]
    LastBlocks {
        #[arg(help = "Number of blocks")]
        n: usize,
    },
    #[command(name = "printchain", about = "Print a summary of every block in the chain")]
    Printchain,
}
