mod common;


#[cfg(test)]
mod test_queue;






#[cfg(test)]
mod test_stat_modifiers;
