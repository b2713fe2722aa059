use macros::Serializable;

use crate::chain::ChainTypes;

/// Data Object for NEW_TRANSACTION_LIST. Broadcasts a batch of transactions.
#[derive(Debug, Clone, PartialEq, Serializable)]
pub struct NewTransactionListCommand<C: ChainTypes> {
    transaction_list: Vec<C::TypedTransaction>,
}

impl<C: ChainTypes> NewTransactionListCommand<C> {
    pub fn new(transaction_list: Vec<C::TypedTransaction>) -> Self {
        NewTransactionListCommand { transaction_list }
    }

    pub fn transaction_list(&self) -> &Vec<C::TypedTransaction> {
        &self.transaction_list
    }
}

impl<C: ChainTypes> Default for NewTransactionListCommand<C> {
    fn default() -> Self {
        NewTransactionListCommand::new(vec![])
    }
}

/// Data Object for NEW_BLOCK_MINOR.
#[derive(Debug, Clone, PartialEq, Serializable)]
pub struct NewBlockMinorCommand<C: ChainTypes> {
    block: C::MinorBlock,
}

impl<C: ChainTypes> NewBlockMinorCommand<C> {
    pub fn new(block: C::MinorBlock) -> Self {
        NewBlockMinorCommand { block }
    }

    pub fn block(&self) -> &C::MinorBlock {
        &self.block
    }
}

/// Data Object for NEW_ROOT_BLOCK.
#[derive(Debug, Clone, PartialEq, Serializable)]
pub struct NewRootBlockCommand<C: ChainTypes> {
    block: C::RootBlock,
}

impl<C: ChainTypes> NewRootBlockCommand<C> {
    pub fn new(block: C::RootBlock) -> Self {
        NewRootBlockCommand { block }
    }

    pub fn block(&self) -> &C::RootBlock {
        &self.block
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialize::Serializable;
    use crate::test_utilities::mocks::{
        make_random_minor_block, make_random_root_block, make_random_transaction, MockChain,
    };
    use crate::test_utilities::seeded_rng;

    #[test]
    fn test_new_transaction_list_serialize() {
        let mut rng = seeded_rng(11);
        let command = NewTransactionListCommand::<MockChain>::new(
            (0..10).map(|_| make_random_transaction(&mut rng)).collect(),
        );
        let bytes = command.serialize();
        assert_eq!(&bytes[0..4], &[0, 0, 0, 10]);
        assert_eq!(
            NewTransactionListCommand::<MockChain>::deserialize(&bytes),
            Ok(command)
        );
        assert_eq!(
            NewTransactionListCommand::<MockChain>::default().serialize(),
            vec![0, 0, 0, 0]
        );
    }

    #[test]
    fn test_new_block_serialize_is_deterministic() {
        let mut rng = seeded_rng(12);
        let minor = NewBlockMinorCommand::<MockChain>::new(make_random_minor_block(&mut rng));
        assert_eq!(minor.serialize(), minor.serialize());
        assert_eq!(
            NewBlockMinorCommand::<MockChain>::deserialize(&minor.serialize()),
            Ok(minor)
        );

        let root = NewRootBlockCommand::<MockChain>::new(make_random_root_block(&mut rng));
        let bytes = root.serialize();
        assert_eq!(bytes, root.clone().serialize());
        assert_eq!(NewRootBlockCommand::<MockChain>::deserialize(&bytes), Ok(root));
    }
}
