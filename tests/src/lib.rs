//! свойства построенных таблиц: чтение из "запеченных" массивов дает те же значения,
//! что и исходные данные

#[cfg(test)]
mod data;

#[cfg(test)]
mod case;
#[cfg(test)]
mod classes;
#[cfg(test)]
mod normalization;
#[cfg(test)]
mod prepare;
