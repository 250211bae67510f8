use crate::{
    err::EncodingErr,
    instruction::Instruction,
    instructions::{
        deposit_all::{deposit_all_ix, DepositAllIxArgs, DepositAllIxKeysOwned, DEPOSIT_ALL_IX_DISCM},
        deposit_single::{
            deposit_single_ix, DepositSingleIxArgs, DepositSingleIxKeysOwned,
            DEPOSIT_SINGLE_IX_DISCM,
        },
        initialize::{initialize_ix, InitializeIxArgs, InitializeIxKeysOwned, INITIALIZE_IX_DISCM},
        swap::{swap_ix, SwapIxArgs, SwapIxKeysOwned, SWAP_IX_DISCM},
        withdraw_all::{
            withdraw_all_ix, WithdrawAllIxArgs, WithdrawAllIxKeysOwned, WITHDRAW_ALL_IX_DISCM,
        },
        withdraw_single::{
            withdraw_single_ix, WithdrawSingleIxArgs, WithdrawSingleIxKeysOwned,
            WITHDRAW_SINGLE_IX_DISCM,
        },
    },
};

/// Every instruction the swap program accepts, with its accounts and args
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SwapIx {
    Initialize {
        keys: InitializeIxKeysOwned,
        args: InitializeIxArgs,
    },
    Swap {
        keys: SwapIxKeysOwned,
        host_fee_account: Option<[u8; 32]>,
        args: SwapIxArgs,
    },
    DepositAllTokenTypes {
        keys: DepositAllIxKeysOwned,
        args: DepositAllIxArgs,
    },
    WithdrawAllTokenTypes {
        keys: WithdrawAllIxKeysOwned,
        args: WithdrawAllIxArgs,
    },
    DepositSingleTokenTypeExactAmountIn {
        keys: DepositSingleIxKeysOwned,
        args: DepositSingleIxArgs,
    },
    WithdrawSingleTokenTypeExactAmountOut {
        keys: WithdrawSingleIxKeysOwned,
        args: WithdrawSingleIxArgs,
    },
}

impl SwapIx {
    #[inline]
    pub const fn discm(&self) -> u8 {
        match self {
            Self::Initialize { .. } => INITIALIZE_IX_DISCM,
            Self::Swap { .. } => SWAP_IX_DISCM,
            Self::DepositAllTokenTypes { .. } => DEPOSIT_ALL_IX_DISCM,
            Self::WithdrawAllTokenTypes { .. } => WITHDRAW_ALL_IX_DISCM,
            Self::DepositSingleTokenTypeExactAmountIn { .. } => DEPOSIT_SINGLE_IX_DISCM,
            Self::WithdrawSingleTokenTypeExactAmountOut { .. } => WITHDRAW_SINGLE_IX_DISCM,
        }
    }

    /// # Errors
    /// If any amount arg does not fit in 8 bytes
    #[inline]
    pub fn to_instruction(&self, program_id: &[u8; 32]) -> Result<Instruction, EncodingErr> {
        match self {
            Self::Initialize { keys, args } => Ok(initialize_ix(program_id, keys, *args)),
            Self::Swap {
                keys,
                host_fee_account,
                args,
            } => swap_ix(program_id, keys, host_fee_account.as_ref(), args),
            Self::DepositAllTokenTypes { keys, args } => deposit_all_ix(program_id, keys, args),
            Self::WithdrawAllTokenTypes { keys, args } => withdraw_all_ix(program_id, keys, args),
            Self::DepositSingleTokenTypeExactAmountIn { keys, args } => {
                deposit_single_ix(program_id, keys, args)
            }
            Self::WithdrawSingleTokenTypeExactAmountOut { keys, args } => {
                withdraw_single_ix(program_id, keys, args)
            }
        }
    }
}
