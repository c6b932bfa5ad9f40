use super::QueryMap;
use crate::ByteStr;

type Pairs<'a> = std::slice::Iter<'a, (ByteStr, ByteStr)>;

impl<'a> IntoIterator for &'a QueryMap {
    type Item = <Iter<'a> as Iterator>::Item;

    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over key and value pairs of a [`QueryMap`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    iter: Pairs<'a>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(iter: Pairs<'a>) -> Self {
        Self { iter }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl ExactSizeIterator for Iter<'_> { }

/// Iterator over all values of a key in a [`QueryMap`].
#[derive(Debug, Clone)]
pub struct GetAll<'a> {
    key: &'a str,
    iter: Pairs<'a>,
}

impl<'a> GetAll<'a> {
    pub(crate) fn new(key: &'a str, iter: Pairs<'a>) -> Self {
        Self { key, iter }
    }
}

impl<'a> Iterator for GetAll<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.key;
        self.iter.find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}
