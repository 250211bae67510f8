use tracing::{debug, info, instrument};
use tswap_core::{
    accounts::swap_state::{SwapState, SWAP_STATE_LEN, SWAP_STATE_VERSION_V1},
    instruction::Instruction,
    instructions::{
        create_account::{create_account_ix, CreateAccountIxArgs, NewCreateAccountIxAccsBuilder},
        initialize::{
            initialize_ix, InitializeIxArgs, InitializeIxData, NewInitializeIxAccsBuilder,
        },
    },
};

use crate::{
    err::SwapClientErr,
    ledger::{LedgerRead, LedgerWrite, Signer},
    min_balance_rent_exempt,
    utils::b58,
    SwapClient,
};

/// Everything needed to create and initialize a new swap, apart from
/// the payer and the new swap account's signer.
///
/// `authority` and `nonce` must be the program-derived address of the new
/// swap account and its bump, see [`crate::pda::find_authority`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CreateSwapArgs {
    pub program_id: [u8; 32],
    pub authority: [u8; 32],
    pub token_account_a: [u8; 32],
    pub token_account_b: [u8; 32],

    /// Pool token mint
    pub token_pool: [u8; 32],

    pub mint_a: [u8; 32],
    pub mint_b: [u8; 32],
    pub fee_account: [u8; 32],

    /// Receives the initial pool token supply
    pub destination_pool_account: [u8; 32],

    pub token_program_id: [u8; 32],

    /// `nonce` is overwritten by [`Self::nonce`]
    pub ix_args: InitializeIxArgs,

    pub nonce: u8,
}

impl CreateSwapArgs {
    #[inline]
    pub const fn initialize_ix_args(&self) -> InitializeIxArgs {
        let mut args = self.ix_args;
        args.nonce = self.nonce;
        args
    }

    /// `[create_account, initialize]`, in submission order
    pub fn ixs(&self, payer: &[u8; 32], swap: &[u8; 32], lamports: u64) -> [Instruction; 2] {
        let create = create_account_ix(
            &NewCreateAccountIxAccsBuilder::start()
                .with_from(*payer)
                .with_new_account(*swap)
                .build(),
            CreateAccountIxArgs {
                lamports,
                space: SWAP_STATE_LEN as u64,
                owner: self.program_id,
            },
        );
        let init = initialize_ix(
            &self.program_id,
            &NewInitializeIxAccsBuilder::start()
                .with_swap(*swap)
                .with_authority(self.authority)
                .with_token_account_a(self.token_account_a)
                .with_token_account_b(self.token_account_b)
                .with_token_pool(self.token_pool)
                .with_fee_account(self.fee_account)
                .with_destination_pool_account(self.destination_pool_account)
                .with_token_program(self.token_program_id)
                .build(),
            self.initialize_ix_args(),
        );
        [create, init]
    }

    /// The state the swap program is expected to write on a successful initialize
    pub fn expected_state(&self) -> SwapState {
        let args = self.initialize_ix_args();
        let data = InitializeIxData::new(args);
        let mut curve_parameters = [0u8; 32];
        // amp followed by the reserved bytes
        curve_parameters.copy_from_slice(&data.as_buf()[67..]);
        SwapState {
            version: SWAP_STATE_VERSION_V1,
            is_initialized: true,
            nonce: self.nonce,
            token_program_id: self.token_program_id,
            token_account_a: self.token_account_a,
            token_account_b: self.token_account_b,
            token_pool: self.token_pool,
            mint_a: self.mint_a,
            mint_b: self.mint_b,
            fee_account: self.fee_account,
            fees: args.fees(),
            curve_type: args.curve_type,
            curve_parameters,
        }
    }
}

impl<L: LedgerRead + LedgerWrite, S: Signer> SwapClient<L, S> {
    /// Allocates, funds and initializes a new swap in a single submission
    /// signed by `payer` and `new_swap`.
    ///
    /// Returns the ledger's confirmation alongside a client over the new swap.
    #[instrument(
        skip_all,
        fields(swap = %b58(&new_swap.pubkey()), program_id = %b58(&args.program_id))
    )]
    pub async fn create_new(
        ledger: L,
        payer: S,
        new_swap: &dyn Signer,
        args: &CreateSwapArgs,
    ) -> Result<(Self, L::Confirmation), SwapClientErr<L::Err>> {
        let swap = new_swap.pubkey();
        let lamports = min_balance_rent_exempt(&ledger).await?;
        let ixs = args.ixs(&payer.pubkey(), &swap, lamports);
        debug!(
            lamports,
            space = SWAP_STATE_LEN,
            n_ixs = ixs.len(),
            "built create swap ixs"
        );

        let confirmation = ledger
            .submit(&ixs, &[&payer, new_swap])
            .await
            .map_err(SwapClientErr::Ledger)?;
        info!(nonce = args.nonce, "created swap");

        Ok((
            Self::new(
                ledger,
                payer,
                args.program_id,
                swap,
                args.authority,
                args.expected_state(),
            ),
            confirmation,
        ))
    }
}
