//! Solidity bindings for the pool and its tokens.

use alloy_sol_types::sol;

// Pool interface (deposit/withdraw and per-account balances)
sol! {
    #[sol(rpc)]
    contract IHookTuah {
        function token0Balance(address owner) external view returns (uint256);
        function token1Balance(address owner) external view returns (uint256);
        function deposit(uint256 amount, bool isToken0) external;
        function withdraw(uint256 amount, bool isToken0) external;
    }
}

// ERC-20 interface (minimal for approval and wallet balance)
sol! {
    #[sol(rpc)]
    contract IERC20 {
        function approve(address spender, uint256 value) external returns (bool);
        function balanceOf(address owner) external view returns (uint256);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, U256};
    use alloy_sol_types::SolCall;

    #[test]
    fn deposit_selector_matches_abi() {
        assert_eq!(IHookTuah::depositCall::SIGNATURE, "deposit(uint256,bool)");
        assert_eq!(IHookTuah::withdrawCall::SIGNATURE, "withdraw(uint256,bool)");
    }

    #[test]
    fn approve_encodes_spender_and_value() {
        let call = IERC20::approveCall {
            spender: Address::repeat_byte(0x01),
            value: U256::from(7u64),
        };
        let encoded = call.abi_encode();
        assert_eq!(&encoded[..4], &IERC20::approveCall::SELECTOR);
        assert_eq!(encoded.len(), 4 + 32 * 2);
    }

    #[test]
    fn balance_reads_take_one_address() {
        assert_eq!(IHookTuah::token0BalanceCall::SIGNATURE, "token0Balance(address)");
        assert_eq!(IERC20::balanceOfCall::SIGNATURE, "balanceOf(address)");
    }
}
